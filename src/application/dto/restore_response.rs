/// RestoreResponse - What a restore put into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreResponse {
    pub lines_restored: usize,
    pub transactions_restored: usize,
}
