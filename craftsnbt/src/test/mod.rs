mod legacy;
mod writer;
