use super::*;

// =============================================================
// OnceGuard
// =============================================================

#[test]
fn once_guard_grants_first_claim_only() {
    let guard = OnceGuard::new();
    assert!(!guard.is_claimed());
    assert!(guard.try_claim());
    assert!(!guard.try_claim());
    assert!(guard.is_claimed());
}

#[test]
fn once_guard_is_shared_between_clones() {
    let guard = OnceGuard::new();
    let other = guard.clone();
    assert!(other.try_claim());
    assert!(!guard.try_claim());
}

#[test]
fn independent_guards_do_not_interfere() {
    let a = OnceGuard::new();
    let b = OnceGuard::new();
    assert!(a.try_claim());
    assert!(b.try_claim());
}

// =============================================================
// MountFlag
// =============================================================

#[test]
fn mount_flag_starts_mounted() {
    assert!(MountFlag::new().is_mounted());
}

#[test]
fn unmount_is_visible_through_clones() {
    let flag = MountFlag::new();
    let task_copy = flag.clone();
    flag.unmount();
    assert!(!task_copy.is_mounted());
}

#[test]
fn unmount_is_idempotent() {
    let flag = MountFlag::new();
    flag.unmount();
    flag.unmount();
    assert!(!flag.is_mounted());
}
