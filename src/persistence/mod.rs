pub mod files;
pub mod store;

pub use files::{
    atomic_write, board_file, ensure_data_dir, get_data_dir, init_local_dir, report_file,
};
pub use store::{load_board, load_board_from, read_board, save_board, save_board_to, LoadError};
