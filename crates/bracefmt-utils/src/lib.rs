pub mod ctfe;
