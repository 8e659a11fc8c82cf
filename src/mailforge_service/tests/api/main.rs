mod email;
mod helpers;
mod messages;
mod root;
