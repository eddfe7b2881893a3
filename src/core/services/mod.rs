pub mod cipher_engine;
