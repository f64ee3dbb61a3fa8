use super::*;

pub(crate) trait EventTargetExt {
  fn add_event_listener<E, F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static;
}

impl<T: AsRef<EventTarget>> EventTargetExt for T {
  fn add_event_listener<E, F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
  {
    let closure = Closure::<dyn FnMut(E)>::new(callback);
    self
      .as_ref()
      .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
      .dom("addEventListener")?;
    closure.forget();
    Ok(())
  }
}
