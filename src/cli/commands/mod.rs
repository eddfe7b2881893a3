pub mod apply;
pub mod cipher_helpers;
pub mod decrypt;
pub mod encrypt;
pub mod methods;
