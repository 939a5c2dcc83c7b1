pub mod a001_apartment;
