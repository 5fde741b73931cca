// implemented by components holding main-loop sources that must be removed explicitly on shutdown
pub trait Destroyable {
    fn destroy(&mut self);
}
