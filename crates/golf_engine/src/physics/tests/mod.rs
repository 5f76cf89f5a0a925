//! Multi-frame scenarios run through the full physics step

mod scenario;
