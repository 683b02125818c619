//! Directory-driven merging of per-user genre files.

pub mod merge;

pub use merge::{GenreMerge, merge_genre_dir, user_id_from_filename};
