pub(super) fn probe() -> bool {
    true
}
