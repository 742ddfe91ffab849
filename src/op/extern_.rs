//! `extern.*` constructors.

use super::leaf_ops;

leaf_ops! {
    convert_any => "extern.convert_any",
}
