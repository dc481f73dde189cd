pub mod glyph_canvas;
