//! Auth service: signup, login and session resolution.

use gearguard_domain::department::{DEFAULT_DEPARTMENT_NAME, Department};
use gearguard_domain::employee::{Employee, Role};
use gearguard_domain::error::{AuthError, GearGuardError, ValidationError};
use gearguard_domain::password::PasswordHash;
use gearguard_domain::session::SessionToken;

use crate::ports::{DepartmentRepository, EmployeeRepository};

/// Details supplied by someone registering an account.
#[derive(Debug, Clone, Default)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

/// Application service for account and session handling.
pub struct AuthService<E, D> {
    employees: E,
    departments: D,
}

impl<E: EmployeeRepository, D: DepartmentRepository> AuthService<E, D> {
    /// Create a new service backed by the given repositories.
    pub fn new(employees: E, departments: D) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// Register a new employee and open a session for them.
    ///
    /// New accounts join the oldest department. When there is none, a
    /// `General` department is created first.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when a field is missing or the
    /// email is already registered, or a storage error.
    #[tracing::instrument(skip(self, signup), fields(email = %signup.email))]
    pub async fn signup(&self, signup: Signup) -> Result<(Employee, SessionToken), GearGuardError> {
        if signup.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if signup.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if signup.password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }
        if self
            .employees
            .find_credentials(&signup.email)
            .await?
            .is_some()
        {
            return Err(ValidationError::EmailTaken.into());
        }

        let department = self.default_department().await?;
        let mut builder = Employee::builder()
            .name(signup.name)
            .email(signup.email)
            .password_hash(PasswordHash::create(&signup.password))
            .department_id(department.id);
        if let Some(role) = signup.role {
            builder = builder.role(role);
        }
        let employee = self.employees.create(builder.build()?).await?;
        tracing::info!(employee_id = %employee.id, "employee signed up");
        let token = SessionToken::issue(employee.id);
        Ok((employee, token))
    }

    async fn default_department(&self) -> Result<Department, GearGuardError> {
        let existing = self
            .departments
            .get_all()
            .await?
            .into_iter()
            .min_by_key(|department| department.id);
        match existing {
            Some(department) => Ok(department),
            None => {
                let general = Department::builder().name(DEFAULT_DEPARTMENT_NAME).build()?;
                self.departments.create(general).await
            }
        }
    }

    /// Check credentials and open a session.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when a field is missing,
    /// [`GearGuardError::Unauthorized`] when the email is unknown or the
    /// password does not match, or a storage error.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Employee, SessionToken), GearGuardError> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }
        let Some((employee, hash)) = self.employees.find_credentials(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !hash.verify(password) {
            tracing::debug!(employee_id = %employee.id, "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }
        let token = SessionToken::issue(employee.id);
        Ok((employee, token))
    }

    /// Resolve the employee a session token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Unauthorized`] when the token is missing,
    /// malformed or names an unknown employee, or a storage error.
    pub async fn current_employee(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Employee, GearGuardError> {
        let id = token
            .and_then(SessionToken::employee_id)
            .ok_or(AuthError::NotAuthenticated)?;
        self.employees
            .get_by_id(id)
            .await?
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}
