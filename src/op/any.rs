//! `any.*` constructors.

use super::leaf_ops;

leaf_ops! {
    convert_extern => "any.convert_extern",
}
