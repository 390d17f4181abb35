//!  Input side of the time table.
//!   - [entities] describes report items and projects as the time tracker returns them.
//!   - [source::ReportSource] abstracts where they are loaded from.

pub mod entities;
pub mod source;
