mod geometry;
mod probability;
