mod booking;
mod favorite;
