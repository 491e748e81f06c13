pub mod load_sample_data;
