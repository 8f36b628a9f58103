pub mod video_info;
