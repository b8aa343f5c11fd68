use plats::RecipeBook;

/// Best objective over every integer assignment, by depth-first search with
/// an optimistic bound. Independent of SCIP; only meant for small books.
pub fn exhaustive_optimum(book: &RecipeBook) -> u64 {
    let mut remaining: Vec<u64> = book.ingredients.iter().map(|i| u64::from(i.stock)).collect();
    let uses: Vec<Vec<u64>> = book
        .recipes
        .iter()
        .map(|r| {
            book.ingredients
                .iter()
                .map(|i| u64::from(r.uses(&i.name)))
                .collect()
        })
        .collect();
    let caps: Vec<u64> = book
        .recipes
        .iter()
        .map(|r| u64::from(r.value) * book.max_batches(r))
        .collect();

    let mut best = 0;
    search(book, &uses, &caps, 0, 0, &mut remaining, &mut best);
    best
}

fn search(
    book: &RecipeBook,
    uses: &[Vec<u64>],
    caps: &[u64],
    index: usize,
    value: u64,
    remaining: &mut [u64],
    best: &mut u64,
) {
    if index == uses.len() {
        *best = (*best).max(value);
        return;
    }
    if value + caps[index..].iter().sum::<u64>() <= *best {
        return;
    }

    let most = uses[index]
        .iter()
        .zip(remaining.iter())
        .filter(|(q, _)| **q > 0)
        .map(|(q, left)| left / q)
        .min()
        .unwrap_or(0);
    let unit = u64::from(book.recipes[index].value);

    for n in (0..=most).rev() {
        for (left, q) in remaining.iter_mut().zip(&uses[index]) {
            *left -= q * n;
        }
        search(book, uses, caps, index + 1, value + unit * n, remaining, best);
        for (left, q) in remaining.iter_mut().zip(&uses[index]) {
            *left += q * n;
        }
    }
}
