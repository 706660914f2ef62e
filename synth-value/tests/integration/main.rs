mod conversions;
mod dispatch;
mod rendering;
mod sequences;
