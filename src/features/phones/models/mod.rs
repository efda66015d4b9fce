mod phone;

pub use phone::Phone;
