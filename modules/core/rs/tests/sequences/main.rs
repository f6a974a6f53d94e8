mod derived;
mod sparse;
mod translation;
