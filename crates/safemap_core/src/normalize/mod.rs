pub mod timestamps;
