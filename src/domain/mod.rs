// Domain layer: stay and charge models, no pricing rules here.

pub mod model;
