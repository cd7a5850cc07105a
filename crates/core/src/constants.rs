/// Decimal places shown for monetary values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Prop key that carries the payload of a text leaf
pub const TEXT_PROP_KEY: &str = "text";

/// Wire key holding an element's tag
pub const NODE_TYPE_KEY: &str = "type";

/// Wire key holding an element's props
pub const NODE_PROPS_KEY: &str = "props";

/// Wire key holding an element's children
pub const NODE_CHILDREN_KEY: &str = "children";

/// Default title of the total row
pub const DEFAULT_TOTAL_TITLE: &str = "TOTAL";
