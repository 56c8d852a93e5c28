/// Index of the largest value, the lowest index winning ties.
///
/// NaN entries are never selected unless every entry is NaN; an empty input
/// yields 0.
pub fn argmax<I>(values: I) -> usize
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, value)| match best {
            Some((_, max)) if value > max => Some((i, value)),
            Some(_) => best,
            None if !value.is_nan() => Some((i, value)),
            None => None,
        })
        .map(|(i, _)| i)
        .unwrap_or_default()
}

/// Element-wise mean of equally long curves, accumulated one curve at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanCurve {
    sum: Vec<f64>,
    count: usize,
}

impl MeanCurve {
    pub fn new(len: usize) -> Self {
        Self {
            sum: vec![0.0; len],
            count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn push<I>(&mut self, curve: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.sum
            .iter_mut()
            .zip(curve)
            .for_each(|(sum, value)| *sum += value);
        self.count += 1;
    }

    pub fn mean(&self) -> Vec<f64> {
        if self.count == 0 {
            return self.sum.clone();
        }
        self.sum.iter().map(|sum| sum / self.count as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_first_wins() {
        assert_eq!(argmax([0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax([0.1, 0.5, 0.5]), 1);
        assert_eq!(argmax([-1.0, -3.0]), 0);
    }

    #[test]
    fn argmax_infinite() {
        assert_eq!(argmax([1.0, f64::INFINITY, f64::INFINITY]), 1);
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax([f64::NAN, 0.2, 0.1]), 1);
        assert_eq!(argmax([0.3, f64::NAN, 0.4]), 2);
        assert_eq!(argmax(Vec::<f64>::new()), 0);
    }

    #[test]
    fn mean_of_curves() {
        let mut curve = MeanCurve::new(3);
        assert_eq!(curve.mean(), vec![0.0, 0.0, 0.0]);

        curve.push([1.0, 2.0, 3.0]);
        curve.push([3.0, 2.0, 1.0]);
        curve.push([2.0, 5.0, 2.0]);
        assert_eq!(curve.count(), 3);
        assert_eq!(curve.mean(), vec![2.0, 3.0, 2.0]);
    }
}
