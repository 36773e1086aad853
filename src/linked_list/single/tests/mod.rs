mod cmp;
mod model;
