/// Grades that never count as completing a course: withdrawn, incomplete,
/// failed, and a blank grade that has not been posted yet
pub const NON_COMPLETING_GRADES: [&str; 4] = ["", "W", "I", "F"];

/// Grade points earned for a course: scale points times credits
pub fn grade_points(scale_points: f64, credits: f64) -> f64 {
    scale_points * credits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points() {
        assert_eq!(grade_points(4.0, 3.0), 12.0);
        assert_eq!(grade_points(3.3, 0.0), 0.0);
        assert!((grade_points(2.7, 1.5) - 4.05).abs() < 1e-9);
    }
}
