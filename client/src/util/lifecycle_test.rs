use super::*;

#[test]
fn new_flag_is_live() {
    assert!(ScopeFlag::new().is_live());
    assert!(ScopeFlag::default().is_live());
}

#[test]
fn release_is_visible_through_clones() {
    let flag = ScopeFlag::new();
    let task_copy = flag.clone();
    flag.release();
    assert!(!task_copy.is_live());
}

#[test]
fn release_is_idempotent() {
    let flag = ScopeFlag::new();
    flag.release();
    flag.release();
    assert!(!flag.is_live());
}

#[test]
fn independent_flags_do_not_share_state() {
    let a = ScopeFlag::new();
    let b = ScopeFlag::new();
    a.release();
    assert!(b.is_live());
}

#[test]
fn owner_cleanup_releases_bound_flag() {
    use leptos::prelude::Owner;

    let owner = Owner::new();
    let flag = owner.with(ScopeFlag::bound_to_owner);
    assert!(flag.is_live());

    owner.cleanup();
    assert!(!flag.is_live());
}

#[test]
fn bound_flag_stays_live_while_owner_is_alive() {
    use leptos::prelude::Owner;

    let owner = Owner::new();
    let flag = owner.with(ScopeFlag::bound_to_owner);
    let sibling = Owner::new();
    sibling.cleanup();
    assert!(flag.is_live());
}
