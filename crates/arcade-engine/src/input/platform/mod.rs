//! Host key-name translation.

pub mod dom;
