pub mod branch;
pub mod change;
pub mod commit;
pub mod document;
pub mod metadata;
