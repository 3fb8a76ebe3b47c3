pub mod reservation_controller;
pub mod room_controller;

pub use reservation_controller::ReservationController;
pub use room_controller::RoomController;
