pub mod write_pgm;
