use {super::*, web_sys::Event};

pub(crate) struct App {
  api: Api,
  config: Config,
  root: Element,
  route: Cell<Option<Route>>,
  state: RefCell<State>,
}

impl App {
  pub(crate) fn new(root: Element) -> Rc<Self> {
    let config = Config::from_attributes(
      root.get_attribute("data-username"),
      root.get_attribute("data-columns"),
    );

    log::info!(
      "showing scrapbook for {} in {} columns",
      config.username,
      config.columns
    );

    Rc::new(Self {
      api: Api::default(),
      state: RefCell::new(State::new(config.columns)),
      config,
      root,
      route: Cell::new(None),
    })
  }

  pub(crate) fn run(self: &Rc<Self>) -> Result<(), Error> {
    let app = self.clone();
    self
      .root
      .add_event_listener("click", move |event: Event| app.click(&event))?;

    let app = self.clone();
    window()?.add_event_listener("popstate", move |_: Event| {
      if let Err(err) = app.navigate() {
        log::error!("{err}");
      }
    })?;

    self.navigate()
  }

  fn click(self: &Rc<Self>, event: &Event) {
    let Some(target) = event
      .target()
      .and_then(|target| target.dyn_into::<Element>().ok())
    else {
      return;
    };

    if let Ok(Some(link)) = target.closest("a[data-route]") {
      event.prevent_default();

      let Some(href) = link.get_attribute("href") else {
        return;
      };

      if let Err(err) = self.push(&href) {
        log::error!("{err}");
      }
    } else if let Ok(Some(_)) = target.closest("button#reload") {
      self.reload();
    }
  }

  fn push(self: &Rc<Self>, href: &str) -> Result<(), Error> {
    window()?
      .history()
      .dom("history")?
      .push_state_with_url(&JsValue::NULL, "", Some(href))
      .dom("pushState")?;

    self.navigate()
  }

  fn navigate(self: &Rc<Self>) -> Result<(), Error> {
    let path = window()?.location().pathname().dom("pathname")?;

    let route = Route::from_path(&path);

    let previous = self.route.replace(route);

    if route == Some(Route::Scrapbook) && previous != Some(Route::Scrapbook) {
      let generation = self.state.borrow_mut().mount();
      self.fetch(generation);
    }

    self.render();

    Ok(())
  }

  fn reload(self: &Rc<Self>) {
    let generation = self.state.borrow_mut().reload();
    log::info!("reloading, generation {generation}");
    self.fetch(generation);
  }

  fn fetch(self: &Rc<Self>, generation: Generation) {
    let app = self.clone();
    spawn_local(async move {
      let profile = logged(app.api.user(&app.config.username).await).map(|user| user.profile);
      app.commit(|state| state.commit_profile(generation, profile));
    });

    let app = self.clone();
    spawn_local(async move {
      let posts = logged(app.api.posts(&app.config.username).await);
      app.commit(|state| state.commit_posts(generation, posts));
    });
  }

  fn commit(&self, commit: impl FnOnce(&mut State) -> bool) {
    let committed = commit(&mut self.state.borrow_mut());

    if committed && self.route.get() == Some(Route::Scrapbook) {
      self.render();
    }
  }

  fn render(&self) {
    let route = self.route.get();

    let main = match route {
      Some(Route::Home) => HomeHtml.to_string(),
      Some(Route::Scrapbook) => self.state.borrow().html().to_string(),
      None => String::new(),
    };

    self
      .root
      .set_inner_html(&PageHtml { route, main }.to_string());
  }
}
