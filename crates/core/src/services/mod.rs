//! Service implementations of the collaborator interfaces
//!
//! Only collaborators that need nothing beyond the standard file system live
//! here; hosts provide the rest.

pub mod fs_file_copier;

pub use fs_file_copier::FsFileCopier;
