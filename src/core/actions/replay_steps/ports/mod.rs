pub mod drawing_sink;
