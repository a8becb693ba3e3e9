pub mod hexcodec;
