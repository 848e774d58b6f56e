mod room_directory;

pub use room_directory::RoomDirectory;
