pub mod cipher;
