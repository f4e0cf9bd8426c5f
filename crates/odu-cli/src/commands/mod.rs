pub mod cast;
pub mod config;
pub mod export;
pub mod figures;
pub mod list;
pub mod show;
pub mod validate;

pub use cast::cast;
pub use export::export;
pub use figures::figures;
pub use list::list;
pub use show::show;
pub use validate::validate;
