mod symbols;
pub use symbols::SymbolLayers;
