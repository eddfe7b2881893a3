pub mod cipher_key;
pub mod cipher_method;
pub mod cipher_request;
