//! Canonical answers shown to learners who ask for an example.
//!
//! Plain text; rendering (syntax highlighting, HTML) belongs to the caller.

use crate::exercise::Exercise;

/// A canonical passing answer for the exercise. Some exercises have more
/// than one accepted shape; those list the variants separated by `// or`.
pub fn example_answer(exercise: Exercise) -> &'static str {
    match exercise {
        Exercise::EmptyObject => "const emptyObject = {};",
        Exercise::ObjectWithTwoStringProperties => {
            r#"const movie = {
    title: "Movie Title",
    description: "Movie description"
};"#
        }
        Exercise::ObjectWithThreeProperties => {
            r#"const user = {
    id: 1234,
    name: "Mrs Blobby",
    isActive: true
};"#
        }
        Exercise::UsingDotNotation => "const productName = product.name;",
        Exercise::UsingBracketNotation => {
            r#"const productDescription = product["product description"];"#
        }
        Exercise::AccessingNestedObjectProperty1 => "const userFirstName = user.name.firstName;",
        Exercise::AccessingNestedObjectProperty2 => "const userPassword = user.login.password;",
        Exercise::AccessingNestedObjectProperty3 => {
            "const userStreet = user.address.locality.street;"
        }
        Exercise::AccessingNestedObjectProperty4 => {
            r#"const userBuildingName = user.address.locality.building["building name"];

// or
const userBuildingName = user["address"]["locality"]["building"]["building name"];"#
        }
        Exercise::UndefinedProperties => {
            r#"const productPrice = product.price;

// or
const productPrice = product["price"];"#
        }
        Exercise::UncaughtReferenceError => {
            r#"const userName = user.name;

// or
const userName = user["name"];"#
        }
        Exercise::UncaughtTypeError => {
            r#"const username = user.login.username;

// or
const username = user["login"]["username"];"#
        }
        Exercise::OptionalChaining => "const loginUsername = user.login?.username;",
        Exercise::NullishCoalescing1 => {
            r#"const productPrice = product.price ?? "Price unknown";"#
        }
        Exercise::NullishCoalescing2 => {
            r#"const propertyCity = property.address?.city ?? "Unknown city";"#
        }
        Exercise::ObjectDestructuring => "const { summary } = blog;",
        Exercise::ObjectDestructuringAliasing => "const { summary: synopsis } = blog;",
        Exercise::NestedObjectDestructuring1 => "const { publishing: { startDate } } = blog;",
        Exercise::NestedObjectDestructuring2 => "const { price: { full: fullPrice } } = product;",
        Exercise::ObjectWithVariousTypes => {
            r#"const myObject = {
    name: "Mrs Blobby",
    age: 42,
    isActive: true,
    hobbies: ["painting"],
    address: { city: "London" },
    greet: function () {},
    nickname: null
};"#
        }
        Exercise::DotNotation1 => {
            r#"for(let i = 0; i < books.length; i++) {
  const bookTitle = books[i].title;
}

// or
for(let i = 0; i < books.length; i++) {
  const book = books[i];
  const bookTitle = book.title;
}"#
        }
        Exercise::Continue1 => {
            r#"for(let i = 0; i < recipes.length; i++) {

  if(recipes[i].numberOfIngredients >= 10) {
    continue;
  }

  const recipeName = recipes[i].name;
}

// or
for(let i = 0; i < recipes.length; i++) {

  if(recipes[i].numberOfIngredients >= 10) {
    continue;
  }

  const recipe = recipes[i];
  const recipeName = recipe.name;
}"#
        }
        Exercise::Break1 => {
            r#"for(let i = 0; i < blogs.length; i++) {

  if(i === 3) {
    break;
  }

  const blogTitle = blogs[i].title;
}

// or
for(let i = 0; i < blogs.length; i++) {

  if(i === 3) {
    break;
  }

  const blog = blogs[i];
  const blogTitle = blog.title;
}"#
        }
        Exercise::ForEach1 => {
            r#"articles.forEach(function(article) {
  const { headline } = article;
});

// or
articles.forEach((article) => {
  const { headline } = article;
});"#
        }
        Exercise::ForEach2 => {
            r#"phones.forEach(function(phone) {
  const { brand, model, price } = phone;
});

// or
phones.forEach((phone) => {
  const { brand, model, price } = phone;
});"#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::check;

    /// Every variant of every example answer passes its own exercise.
    #[test]
    fn example_answers_pass_their_exercises() {
        for exercise in Exercise::ALL {
            for variant in example_answer(exercise).split("// or") {
                let variant = variant.trim();
                let res = check(variant, exercise);
                assert!(
                    res.is_success(),
                    "{exercise:?} example failed: {variant}\n{res:?}"
                );
            }
        }
    }
}
