//! `i31.*` constructors.

use super::leaf_ops;

leaf_ops! {
    get_s => "i31.get_s",
    get_u => "i31.get_u",
}
