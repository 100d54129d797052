mod common;

mod guidance;
mod routing;
