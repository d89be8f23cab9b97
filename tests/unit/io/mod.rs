mod ascii;
mod placement;
