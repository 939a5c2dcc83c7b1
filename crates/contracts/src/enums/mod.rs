pub mod calc_type;
pub mod currency;
pub mod down_payment;
