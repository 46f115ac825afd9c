use serde::{Deserialize, Serialize};

use primer_core::Entity;

/// Payroll identifier of a staff member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for EmployeeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Capability set shared by every staff variant.
///
/// All fields are freely mutable; the bonus policy is what the variant
/// decides at runtime.
pub trait StaffMember {
    fn name(&self) -> &str;

    fn employee_id(&self) -> EmployeeId;

    fn salary(&self) -> f64;

    fn set_name(&mut self, name: String);

    fn set_employee_id(&mut self, id: EmployeeId);

    fn set_salary(&mut self, salary: f64);

    /// Bonus under the variant's policy.
    fn bonus(&self) -> f64;
}

/// Staff member on the base bonus policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    id: EmployeeId,
    salary: f64,
}

impl Employee {
    /// Base bonus: 10% of salary.
    pub const BONUS_RATE: f64 = 0.10;

    pub fn new(name: impl Into<String>, id: u32, salary: f64) -> Self {
        Self {
            name: name.into(),
            id: EmployeeId::new(id),
            salary,
        }
    }
}

impl StaffMember for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn employee_id(&self) -> EmployeeId {
        self.id
    }

    fn salary(&self) -> f64 {
        self.salary
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_employee_id(&mut self, id: EmployeeId) {
        self.id = id;
    }

    fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    fn bonus(&self) -> f64 {
        self.salary * Self::BONUS_RATE
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "employee {} ({}), salary {:.2}",
            self.name, self.id, self.salary
        )
    }
}

/// Staff member on the manager bonus policy, attached to a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    employee: Employee,
    department: String,
}

impl Manager {
    /// Manager bonus: 20% of salary.
    pub const BONUS_RATE: f64 = 0.20;

    pub fn new(
        name: impl Into<String>,
        id: u32,
        salary: f64,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee: Employee::new(name, id, salary),
            department: department.into(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_department(&mut self, department: String) {
        self.department = department;
    }
}

impl StaffMember for Manager {
    fn name(&self) -> &str {
        self.employee.name()
    }

    fn employee_id(&self) -> EmployeeId {
        self.employee.employee_id()
    }

    fn salary(&self) -> f64 {
        self.employee.salary()
    }

    fn set_name(&mut self, name: String) {
        self.employee.set_name(name);
    }

    fn set_employee_id(&mut self, id: EmployeeId) {
        self.employee.set_employee_id(id);
    }

    fn set_salary(&mut self, salary: f64) {
        self.employee.set_salary(salary);
    }

    fn bonus(&self) -> f64 {
        self.salary() * Self::BONUS_RATE
    }
}

impl Entity for Manager {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        Entity::id(&self.employee)
    }
}

impl core::fmt::Display for Manager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "manager {} ({}), {} department, salary {:.2}",
            self.name(),
            self.employee_id(),
            self.department,
            self.salary()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn employee_bonus_is_ten_percent() {
        let employee = Employee::new("John", 101, 50_000.0);
        assert_close(employee.bonus(), 5_000.0);
    }

    #[test]
    fn manager_bonus_is_twenty_percent() {
        let manager = Manager::new("Alice", 201, 80_000.0, "IT");
        assert_close(manager.bonus(), 16_000.0);
    }

    #[test]
    fn manager_carries_the_shared_fields() {
        let manager = Manager::new("Alice", 201, 80_000.0, "IT");
        assert_eq!(manager.name(), "Alice");
        assert_eq!(manager.employee_id(), EmployeeId::new(201));
        assert_eq!(manager.salary(), 80_000.0);
        assert_eq!(manager.department(), "IT");
    }

    #[test]
    fn all_fields_are_mutable_through_setters() {
        let mut manager = Manager::new("Alice", 201, 80_000.0, "HR");
        manager.set_name("Alicia".to_string());
        manager.set_employee_id(EmployeeId::new(301));
        manager.set_salary(90_000.0);
        manager.set_department("Finance".to_string());

        assert_eq!(manager.name(), "Alicia");
        assert_eq!(manager.employee_id().value(), 301);
        assert_eq!(manager.salary(), 90_000.0);
        assert_eq!(manager.department(), "Finance");
        assert_close(manager.bonus(), 18_000.0);
    }

    #[test]
    fn bonus_is_polymorphic_across_variants() {
        let staff: Vec<Box<dyn StaffMember>> = vec![
            Box::new(Employee::new("John", 101, 50_000.0)),
            Box::new(Manager::new("Alice", 201, 80_000.0, "HR")),
        ];

        assert_close(staff[0].bonus(), 5_000.0);
        assert_close(staff[1].bonus(), 16_000.0);
        assert!(staff[1].bonus() > staff[0].bonus());
    }

    #[test]
    fn manager_outearns_employee_at_equal_salary() {
        let employee = Employee::new("John", 101, 60_000.0);
        let manager = Manager::new("Alice", 201, 60_000.0, "IT");
        assert!(manager.bonus() > employee.bonus());
    }

    #[test]
    fn display_summarizes_key_fields() {
        let employee = Employee::new("John", 101, 50_000.0);
        let rendered = employee.to_string();
        assert!(rendered.contains("John"));
        assert!(rendered.contains("101"));
        assert!(rendered.contains("50000.00"));

        let manager = Manager::new("Alice", 201, 80_000.0, "IT");
        assert!(manager.to_string().contains("IT department"));
    }

    #[test]
    fn identity_is_the_employee_id() {
        let manager = Manager::new("Alice", 201, 80_000.0, "IT");
        assert_eq!(Entity::id(&manager), &EmployeeId::new(201));
    }
}
