//! Password classification sections
//!
//! Each section answers one question about the stripped password. The
//! classifier runs them in order and stops at the first one that settles
//! the tier.

mod all_classes;
mod length;
mod single_class;

pub use all_classes::{SYMBOL_ALLOW_LIST, all_classes_section, is_allow_listed_symbol};
pub use length::length_section;
pub use single_class::single_class_section;
