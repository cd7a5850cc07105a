/// Report metadata
pub const REPORT_VERSION: u32 = 1;
pub const REPORT_NAME: &str = "Margin Call report";
pub const REPORT_DESCRIPTION: &str = "Lists accounts currently under margin call or stop out. \
     Includes financial details such as balance, equity, margin, and full account details.";

/// Heading shown above the table
pub const REPORT_TITLE: &str = "Margin Call Report";

/// Name of the data-table widget
pub const TABLE_NAME: &str = "MarginCallReportTable";

/// Log prefix for failures inside the handler
pub const LOG_CONTEXT: &str = "[MarginCallReport]";

pub const COL_LOGIN: &str = "login";
pub const COL_NAME: &str = "name";
pub const COL_LEVERAGE: &str = "leverage";
pub const COL_BALANCE: &str = "balance";
pub const COL_CREDIT: &str = "credit";
pub const COL_FLOATING_PL: &str = "floating_pl";
pub const COL_EQUITY: &str = "equity";
pub const COL_MARGIN: &str = "margin";
pub const COL_MARGIN_FREE: &str = "margin_free";
pub const COL_MARGIN_LEVEL: &str = "margin_level";
pub const COL_CURRENCY: &str = "currency";

/// Columns as (key, label), in display order
pub const COLUMNS: [(&str, &str); 11] = [
    (COL_LOGIN, "LOGIN"),
    (COL_NAME, "NAME"),
    (COL_LEVERAGE, "LEVERAGE"),
    (COL_BALANCE, "BALANCE"),
    (COL_CREDIT, "CREDIT"),
    (COL_FLOATING_PL, "Floating P/L"),
    (COL_EQUITY, "EQUITY"),
    (COL_MARGIN, "MARGIN"),
    (COL_MARGIN_FREE, "MARGIN_FREE"),
    (COL_MARGIN_LEVEL, "MARGIN_LEVEL"),
    (COL_CURRENCY, "CURRENCY"),
];

/// Monetary fields summed into the total row, in total-row key order
pub const TOTAL_FIELDS: [&str; 6] = [
    COL_BALANCE,
    COL_CREDIT,
    COL_EQUITY,
    COL_FLOATING_PL,
    COL_MARGIN,
    COL_MARGIN_FREE,
];
