mod helpers;
mod sessions;
mod sign_in;
