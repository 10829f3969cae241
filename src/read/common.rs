/// Arguments for single-item read operations (GetItem).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SingleReadArgs {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

/// Arguments for multiple-item read operations (Scan).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MultipleReadArgs {
    /// Whether to use a consistent read.
    pub consistent_read: Option<bool>,
    /// The maximum number of items to evaluate per page.
    ///
    /// This bounds a single request, not the whole operation: pages are
    /// requested until DynamoDB stops returning a `LastEvaluatedKey`.
    pub limit: Option<i32>,
    /// The name of the table to read from.
    pub table_name: String,
}

/// apply common single read operation settings to a builder
#[macro_export]
macro_rules! apply_single_read_operation {
    ($builder:expr, $single_read_args:expr) => {
        $builder
            .set_consistent_read($single_read_args.consistent_read)
            .table_name($single_read_args.table_name)
    };
}

/// apply common multiple read operation settings to a builder
#[macro_export]
macro_rules! apply_multiple_read_operation {
    ($builder:expr, $multiple_read_args:expr) => {
        $builder
            .set_consistent_read($multiple_read_args.consistent_read)
            .set_limit($multiple_read_args.limit)
            .table_name($multiple_read_args.table_name)
    };
}
