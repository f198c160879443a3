mod hotel;
mod route;
