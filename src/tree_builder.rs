use super::*;

struct Node {
  children: Vec<usize>,
  comment: Comment,
}

struct Pending {
  parent: Option<usize>,
  path: String,
  value: Value,
}

/// Turns the two-listing payload of a thread into a post and its comment
/// forest.
///
/// Nodes are visited with an explicit stack and collected into an arena in
/// pre-order, so every child sits at a higher index than its parent. The arena
/// is then folded back to front into owned trees.
#[derive(Default)]
pub(crate) struct TreeBuilder {
  arena: Vec<Node>,
  hidden: u64,
  placeholders: usize,
  roots: Vec<usize>,
  stack: Vec<Pending>,
}

impl TreeBuilder {
  fn attach(&mut self, parent: Option<usize>, child: usize) {
    match parent.and_then(|parent| self.arena.get_mut(parent)) {
      Some(node) => node.children.push(child),
      None => self.roots.push(child),
    }
  }

  pub(crate) fn build(payload: Value) -> Result<(Post, Vec<Comment>), Error> {
    let listings = match payload {
      Value::Array(listings) => listings,
      other => {
        return Err(Error::malformed(
          "$",
          format!("expected an array of two listings, found {}", kind_of(&other)),
        ));
      }
    };

    let [post_listing, comment_listing] =
      <[Value; 2]>::try_from(listings).map_err(|listings| {
        Error::malformed(
          "$",
          format!("expected 2 listings, found {}", listings.len()),
        )
      })?;

    let post = Self::post(post_listing)?;

    let mut builder = Self::default();

    let comments = Self::listing(comment_listing, "$[1]")?;

    builder.push_children(comments, None, "$[1]");

    builder.run()?;

    if builder.placeholders > 0 {
      debug!(
        placeholders = builder.placeholders,
        hidden = builder.hidden,
        "dropped unfetched reply placeholders"
      );
    }

    Ok((post, builder.finish()))
  }

  fn finish(self) -> Vec<Comment> {
    let mut finished = Vec::<Option<Comment>>::new();
    finished.resize_with(self.arena.len(), || None);

    for (idx, node) in self.arena.into_iter().enumerate().rev() {
      let Node {
        children,
        mut comment,
      } = node;

      comment.children = children
        .into_iter()
        .filter_map(|child| finished.get_mut(child).and_then(Option::take))
        .collect();

      if let Some(slot) = finished.get_mut(idx) {
        *slot = Some(comment);
      }
    }

    self
      .roots
      .into_iter()
      .filter_map(|root| finished.get_mut(root).and_then(Option::take))
      .collect()
  }

  fn listing(value: Value, path: &str) -> Result<ListingData, Error> {
    match Self::thing(value, path)? {
      Thing::Listing(listing) => Ok(listing),
      other => Err(Error::malformed(
        path,
        format!("expected a Listing, found `{}`", other.kind()),
      )),
    }
  }

  fn post(listing: Value) -> Result<Post, Error> {
    let ListingData { children } = Self::listing(listing, "$[0]")?;

    let [child] = <[Value; 1]>::try_from(children).map_err(|children| {
      Error::malformed(
        "$[0].data.children",
        format!("expected exactly one post, found {} children", children.len()),
      )
    })?;

    let path = "$[0].data.children[0]";

    match Self::thing(child, path)? {
      Thing::Link(data) => Ok(Post::from(data)),
      other => Err(Error::malformed(
        path,
        format!("expected a post (`t3`), found `{}`", other.kind()),
      )),
    }
  }

  fn push_children(
    &mut self,
    listing: ListingData,
    parent: Option<usize>,
    path: &str,
  ) {
    self.stack.extend(
      listing
        .children
        .into_iter()
        .enumerate()
        .rev()
        .map(|(index, value)| Pending {
          parent,
          path: format!("{path}.data.children[{index}]"),
          value,
        }),
    );
  }

  fn run(&mut self) -> Result<(), Error> {
    while let Some(Pending {
      parent,
      path,
      value,
    }) = self.stack.pop()
    {
      match Self::thing(value, &path)? {
        Thing::Comment(mut data) => {
          let replies = data.replies.take();

          let idx = self.arena.len();

          self.arena.push(Node {
            children: Vec::new(),
            comment: Comment::from(data),
          });

          self.attach(parent, idx);

          if let Some(replies) = replies {
            let path = format!("{path}.data.replies");
            let listing = Self::listing(replies, &path)?;
            self.push_children(listing, Some(idx), &path);
          }
        }
        Thing::Link(_) => {
          return Err(Error::malformed(
            path,
            "unexpected post (`t3`) inside a comment listing",
          ));
        }
        Thing::Listing(listing) => {
          self.push_children(listing, parent, &path);
        }
        Thing::More(MoreData { count }) => {
          self.placeholders += 1;
          self.hidden = self.hidden.saturating_add(count);
        }
      }
    }

    Ok(())
  }

  fn thing(mut value: Value, path: &str) -> Result<Thing, Error> {
    let (children, replies) =
      match value.get_mut("data").and_then(Value::as_object_mut) {
        Some(data) => (data.remove("children"), data.remove("replies")),
        None => (None, None),
      };

    let mut thing = serde_json::from_value::<Thing>(value)
      .map_err(|error| Error::malformed(path, error))?;

    match &mut thing {
      Thing::Comment(data) => {
        data.replies = replies_listing(replies).map_err(|reason| {
          Error::malformed(format!("{path}.data.replies"), reason)
        })?;
      }
      Thing::Listing(listing) => {
        listing.children = match children {
          Some(Value::Array(children)) => children,
          Some(other) => {
            return Err(Error::malformed(
              format!("{path}.data.children"),
              format!("expected an array, found {}", kind_of(&other)),
            ));
          }
          None => {
            return Err(Error::malformed(path, "missing field `children`"));
          }
        };
      }
      Thing::Link(_) | Thing::More(_) => {}
    }

    Ok(thing)
  }
}
