//! Signal summing primitives.

/*
Summing Signals
===============

The synthesized signal is the plain sum of the individual signals, sample by
sample. No weighting, no normalization.

Vocabulary
----------

  summing       Adding signals at equal levels. The result can exceed the
                range of any single input: three waves of amplitude 10 can
                peak at 30.

  accumulator   A buffer that starts at zero and has each signal added into
                it as soon as that signal is produced.


Why Accumulate
--------------

The sum could be computed afterwards by re-evaluating every signal. That
would be a second, independent evaluation, and floating point only promises
the two agree approximately. Adding each finished signal into the
accumulator instead makes the sum exactly

    ((0.0 + s1[i]) + s2[i]) + s3[i]

which is what any caller re-adding the returned signals in order gets too.


Phase Relationships
-------------------

  IN PHASE:      Equal frequencies and phases add constructively (2A).
  OUT OF PHASE:  A 180° offset cancels: sin(x) + sin(x + π) = 0.

Frequencies that differ slightly beat against each other: the sum swells
and fades at the difference frequency.
*/

/// Add signal `b` into accumulator `a` in place.
#[inline]
pub fn sum_in_place(a: &mut [f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa += sb;
    }
}

/// Add a constant offset to every sample.
#[inline]
pub fn offset_in_place(a: &mut [f64], offset: f64) {
    for sample in a.iter_mut() {
        *sample += offset;
    }
}
